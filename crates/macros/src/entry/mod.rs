mod output;
mod parser;

/// Configurable macro code to build entry.
pub(crate) fn build(
    args: proc_macro::TokenStream,
    item_stream: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let config = syn::parse_macro_input!(args as parser::Config);
    let item = syn::parse_macro_input!(item_stream as syn::ItemFn);

    if let Err(error) = parser::validate(&item) {
        return error.into_compile_error().into();
    }

    output::expand(&config, item).into()
}
