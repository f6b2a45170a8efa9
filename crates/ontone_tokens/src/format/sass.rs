use super::{entries, property_block, CustomPropertiesFormat, FormatOptions};
use crate::builder::TokenList;

pub(super) fn render(out: &mut String, tokens: &TokenList, options: &FormatOptions) {
    // Variables
    out.push_str(&entries(tokens, "", "", |token| {
        format!("${}: {} !default;", token.name, token.color)
    }));

    // Map
    out.push_str("\n\n$");
    out.push_str(&options.map_name);
    out.push_str(": (\n  ");
    out.push_str(&entries(tokens, "  ", ",", |token| {
        format!("\"{}\": ${}", token.name, token.name)
    }));
    out.push_str("\n) !default;");

    let Some(custom_properties) = options.custom_properties else {
        return;
    };

    out.push_str("\n\n");
    let selector = match custom_properties {
        CustomPropertiesFormat::Root => ":root".to_string(),
        CustomPropertiesFormat::Mixin => format!("@mixin {}()", options.map_name),
    };
    property_block(out, &selector, tokens, |token| format!("#{{${}}}", token.name));
}
