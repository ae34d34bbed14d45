//! CSS custom-property output.

use crate::config::{Selectors, MODE_PLACEHOLDER};
use crate::ir::{Ir, ModeCategory, Token, TokenMap};

/// Render an IR as CSS.
///
/// One base block under `selectors.root` holds every default token. Each
/// override mode gets a block per category it belongs to, holding only that
/// category's families, under the category's selector template. Modes not
/// listed in any category, and blocks with no tokens, are skipped.
pub fn to_css(ir: &Ir, selectors: &Selectors) -> String {
    let mut blocks = Vec::new();

    if !ir.tokens.is_empty() {
        blocks.push(render_block(&selectors.root, ir.tokens.values()));
    }

    for (mode, tokens) in &ir.override_tokens {
        let categories = ir.categories_of(mode);
        if categories.is_empty() {
            tracing::debug!(mode = %mode, "skipping override mode outside every category");
            continue;
        }

        for category in categories {
            let mut members = in_category(tokens, category).peekable();
            if members.peek().is_none() {
                continue;
            }
            let selector = template(selectors, category).replace(MODE_PLACEHOLDER, mode);
            blocks.push(render_block(&selector, members));
        }
    }

    blocks.join("\n\n")
}

fn template(selectors: &Selectors, category: ModeCategory) -> &str {
    match category {
        ModeCategory::Color => &selectors.color,
        ModeCategory::Size => &selectors.size,
        ModeCategory::Time => &selectors.time,
    }
}

fn in_category(tokens: &TokenMap, category: ModeCategory) -> impl Iterator<Item = &Token> {
    tokens
        .values()
        .filter(move |t| t.family.category() == category)
}

fn render_block<'a>(selector: &str, tokens: impl Iterator<Item = &'a Token>) -> String {
    let mut out = format!("{} {{\n", selector);
    for token in tokens {
        out.push_str(&format!("  --{}: {};\n", token.name, token.value));
    }
    out.push('}');
    out
}
