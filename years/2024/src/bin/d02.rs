use lib::prelude::*;
use y2024::reports;

#[entry(input = "d02.txt", expect = (341, 404))]
fn main(input: IStr) -> Result<(usize, usize)> {
    let reports = reports::parse(input);
    let o1 = reports::count_safe(&reports);
    let o2 = reports::count_tolerable(&reports);
    Ok((o1, o2))
}
