//! Procedural macros shared by the sfkit crates.
//!
//! The only macro is [`macro@context`], an attribute that attaches a formatted
//! `anyhow` context message to every error returned by the annotated function.

mod args;

use crate::args::Args;
use proc_macro::TokenStream;
use proc_macro2::{Ident, Span, TokenStream as TokenStream2};
use quote::{ToTokens, quote};
use syn::parse_macro_input;

/// Wraps the body of a function returning `anyhow::Result<T>` so that any error
/// gets the given message as additional context.
///
/// The arguments are passed to `format!`, so function parameters can be referenced:
///
/// ```ignore
/// #[context("while reading config file {}", path.display())]
/// fn from_path(path: &Path) -> Result<Config> { ... }
/// ```
///
/// Prefix the arguments with `move,` to move captured parameters into the wrapping
/// closure.
#[proc_macro_attribute]
pub fn context(args: TokenStream, input: TokenStream) -> TokenStream {
	let args = parse_macro_input!(args as Args);
	let input = parse_macro_input!(input as syn::ItemFn);
	expand_context(args, input).into()
}

fn expand_context(Args(move_token, format_args): Args, mut input: syn::ItemFn) -> TokenStream2 {
	if input.sig.asyncness.is_some() {
		return syn::Error::new_spanned(input.sig.asyncness, "#[context] only supports synchronous functions")
			.to_compile_error();
	}

	let return_type = match &input.sig.output {
		syn::ReturnType::Default => {
			return syn::Error::new_spanned(&input.sig, "function should return Result").to_compile_error();
		}
		syn::ReturnType::Type(_, return_type) => return_type.clone(),
	};

	let body = &input.block;
	let err = Ident::new("err", Span::mixed_site());
	let force_fn_once = Ident::new("force_fn_once", Span::mixed_site());
	let new_body = quote! {
		// Moving a non-`Copy` value into the closure makes it `FnOnce`,
		// which keeps the borrow checker happy about mutable captures.
		let #force_fn_once = ::core::iter::empty::<()>();
		(#move_token || -> #return_type {
			::core::mem::drop(#force_fn_once);
			#body
		})().map_err(|#err| #err.context(format!(#format_args)).into())
	};
	input.block.stmts = vec![syn::Stmt::Expr(syn::Expr::Verbatim(new_body), None)];

	input.into_token_stream()
}
