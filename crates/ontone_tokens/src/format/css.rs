use super::property_block;
use crate::builder::TokenList;

pub(super) fn render(out: &mut String, tokens: &TokenList) {
    property_block(out, ":root", tokens, |token| token.color.to_string());
}
