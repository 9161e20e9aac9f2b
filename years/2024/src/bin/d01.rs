use lib::prelude::*;
use y2024::distance::Columns;

#[entry(input = "d01.txt", expect = (1530215, 26800609))]
fn main(input: IStr) -> Result<(u64, i64)> {
    let mut columns = Columns::parse(input);
    let o1 = columns.total_distance()?;
    let o2 = columns.similarity()?;
    Ok((o1, o2))
}
