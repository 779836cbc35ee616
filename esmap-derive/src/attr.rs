use proc_macro2::TokenStream;
use syn::meta::ParseNestedMeta;
use syn::{Attribute, LitStr, Token};

/// serde's `rename_all` rules for fields. Only `_` separates words, so digits
/// and existing capitals are kept as written.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RenameRule {
    Lower,
    Upper,
    Pascal,
    Camel,
    Snake,
    ScreamingSnake,
    Kebab,
    ScreamingKebab,
}

impl RenameRule {
    fn from_lit(lit: &LitStr) -> syn::Result<Self> {
        let rule = match lit.value().as_str() {
            "lowercase" => RenameRule::Lower,
            "UPPERCASE" => RenameRule::Upper,
            "PascalCase" => RenameRule::Pascal,
            "camelCase" => RenameRule::Camel,
            "snake_case" => RenameRule::Snake,
            "SCREAMING_SNAKE_CASE" => RenameRule::ScreamingSnake,
            "kebab-case" => RenameRule::Kebab,
            "SCREAMING-KEBAB-CASE" => RenameRule::ScreamingKebab,
            other => {
                return Err(syn::Error::new(
                    lit.span(),
                    format!("unknown rename rule `{}`", other),
                ))
            }
        };
        Ok(rule)
    }

    pub fn apply(self, field: &str) -> String {
        match self {
            RenameRule::Lower | RenameRule::Snake => field.to_string(),
            RenameRule::Upper | RenameRule::ScreamingSnake => field.to_ascii_uppercase(),
            RenameRule::Pascal => {
                let mut pascal = String::with_capacity(field.len());
                let mut capitalize = true;
                for ch in field.chars() {
                    if ch == '_' {
                        capitalize = true;
                    } else if capitalize {
                        pascal.push(ch.to_ascii_uppercase());
                        capitalize = false;
                    } else {
                        pascal.push(ch);
                    }
                }
                pascal
            }
            RenameRule::Camel => {
                let pascal = RenameRule::Pascal.apply(field);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
                    None => pascal,
                }
            }
            RenameRule::Kebab => field.replace('_', "-"),
            RenameRule::ScreamingKebab => field.to_ascii_uppercase().replace('_', "-"),
        }
    }
}

#[derive(Debug, Default)]
pub struct ContainerAttrs {
    pub rename: Option<String>,
    pub rename_all: Option<RenameRule>,
}

impl ContainerAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = ContainerAttrs::default();
        for attr in attrs.iter().filter(|a| a.path().is_ident("serde")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    if let Some(name) = serialize_name(&meta)? {
                        out.rename = Some(name.value());
                    }
                } else if meta.path.is_ident("rename_all") {
                    if let Some(rule) = serialize_name(&meta)? {
                        out.rename_all = Some(RenameRule::from_lit(&rule)?);
                    }
                } else {
                    skip_meta(&meta)?;
                }
                Ok(())
            })?;
        }
        Ok(out)
    }
}

#[derive(Debug, Default)]
pub struct FieldAttrs {
    pub rename: Option<String>,
    pub es: Option<String>,
    pub flatten: bool,
    pub skip: bool,
}

impl FieldAttrs {
    pub fn parse(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = FieldAttrs::default();
        for attr in attrs {
            if attr.path().is_ident("serde") {
                attr.parse_nested_meta(|meta| {
                    if meta.path.is_ident("rename") {
                        if let Some(name) = serialize_name(&meta)? {
                            out.rename = Some(name.value());
                        }
                    } else if meta.path.is_ident("flatten") {
                        out.flatten = true;
                    } else if meta.path.is_ident("skip") || meta.path.is_ident("skip_serializing") {
                        out.skip = true;
                    } else {
                        skip_meta(&meta)?;
                    }
                    Ok(())
                })?;
            } else if attr.path().is_ident("es") {
                match attr.parse_args::<LitStr>() {
                    Ok(tag) => out.es = Some(tag.value()),
                    Err(_) => attr.parse_nested_meta(|meta| {
                        if meta.path.is_ident("flatten") {
                            out.flatten = true;
                            Ok(())
                        } else {
                            Err(meta.error("expected a tag string or `flatten`"))
                        }
                    })?,
                }
            }
        }
        Ok(out)
    }
}

/// Reads `key = "v"` or `key(serialize = "v", ..)`.
fn serialize_name(meta: &ParseNestedMeta) -> syn::Result<Option<LitStr>> {
    if meta.input.peek(Token![=]) {
        return Ok(Some(meta.value()?.parse()?));
    }

    let mut name = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("serialize") {
            name = Some(inner.value()?.parse()?);
        } else {
            skip_meta(&inner)?;
        }
        Ok(())
    })?;
    Ok(name)
}

/// Consumes serde options that don't affect the mapping.
fn skip_meta(meta: &ParseNestedMeta) -> syn::Result<()> {
    if meta.input.peek(Token![=]) {
        meta.value()?.parse::<syn::Expr>()?;
    } else if meta.input.peek(syn::token::Paren) {
        let content;
        syn::parenthesized!(content in meta.input);
        content.parse::<TokenStream>()?;
    }
    Ok(())
}
