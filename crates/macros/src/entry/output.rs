use proc_macro2::TokenStream;
use quote::quote;
use syn::{Ident, ItemFn};

use super::parser::Config;

/// Expand the solution into a `main` function.
///
/// The solution is kept as a nested item renamed to `solution` so that it can
/// be called from the generated `main`.
pub(crate) fn expand(config: &Config, mut item: ItemFn) -> TokenStream {
    item.sig.ident = Ident::new("solution", item.sig.ident.span());

    let input_file = &config.input_file;

    // Expectations only hold for the default input.
    let (check, bench_setup, bench_check) = match &config.expect {
        Some(expect) => (
            quote! {
                if opts.is_default_input() {
                    ::lib::cli::check_expected(&value, &(#expect))?;
                }
            },
            quote!(let check = opts.is_default_input();),
            quote! {
                if check {
                    ::lib::cli::check_expected(&value, &(#expect))?;
                }
            },
        ),
        None => (quote!(), quote!(), quote!()),
    };

    quote! {
        fn main() -> ::lib::prelude::Result<()> {
            #item

            let opts = ::lib::cli::Opts::parse()?;
            let (input, path) = ::lib::input!(opts, #input_file);

            match opts.mode {
                ::lib::cli::Mode::Default => {
                    let value = match solution(input) {
                        ::core::result::Result::Ok(value) => value,
                        ::core::result::Result::Err(error) => {
                            return ::core::result::Result::Err(
                                ::lib::cli::error_context(path, input, error),
                            );
                        }
                    };

                    ::lib::cli::answers(&opts, &value)?;
                    #check
                }
                ::lib::cli::Mode::Bench => {
                    #bench_setup
                    let mut b = ::lib::cli::Bencher::new();

                    b.iter(&opts, || {
                        let value = solution(input)?;
                        #bench_check
                        ::core::result::Result::<_, ::lib::macro_support::Error>::Ok(value)
                    })?;
                }
            }

            ::core::result::Result::Ok(())
        }
    }
}
