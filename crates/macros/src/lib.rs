use proc_macro::TokenStream;

mod entry;

/// Turn a solution function into the program entrypoint.
///
/// ```ignore
/// #[entry(input = "d01.txt", expect = (11, 31))]
/// fn main(input: IStr) -> Result<(u64, i64)> {
///     /* .. */
/// }
/// ```
///
/// The `input` file is read from the `inputs` directory of the crate unless
/// overridden with `--input <path>`. If `expect` is specified, answers
/// computed from the default input must equal it.
#[proc_macro_attribute]
pub fn entry(args: TokenStream, item_stream: TokenStream) -> TokenStream {
    crate::entry::build(args, item_stream)
}
