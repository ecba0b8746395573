use proc_macro2::TokenStream as TokenStream2;
use syn::Token;
use syn::parse::{self, Parse, ParseStream};

/// Arguments of `#[context(...)]`: an optional leading `move,` followed by
/// everything that is handed to `format!`.
#[derive(Debug)]
pub struct Args(pub Option<Token![move]>, pub TokenStream2);

impl Parse for Args {
	fn parse(input: ParseStream<'_>) -> parse::Result<Self> {
		let move_token = if input.peek(Token![move]) {
			let token = input.parse()?;
			input.parse::<Token![,]>()?;
			Some(token)
		} else {
			None
		};
		if input.is_empty() {
			return Err(input.error("expected a context message"));
		}
		Ok(Self(move_token, input.parse()?))
	}
}
