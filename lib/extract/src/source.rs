use serde::{Deserialize, Serialize};
use uisim_core::UiFramework;
use uisim_corpus::ComponentSourceRef;

/// Raw source text of one component, ready for feature extraction
///
/// For single file frameworks template and logic hold the same text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentSource {
    pub id: String,
    pub framework: UiFramework,
    pub template_code: String,
    pub style_code: String,
    pub logic_code: String,
}

/// Turns a source reference into source text
///
/// Loading never fails: a part that cannot be read contributes an empty
/// string and extraction carries on.
pub trait SourceLoader: Send + Sync {
    fn load(&self, source_ref: &ComponentSourceRef) -> ComponentSource;
}

/// Loader that only uses code carried inline by the reference
///
/// Style snippets are joined with a newline. Parts with no inline code are
/// empty. Single file frameworks reuse the inline template as logic code.
#[derive(Debug, Clone, Copy, Default)]
pub struct InlineSourceLoader;

impl SourceLoader for InlineSourceLoader {
    fn load(&self, source_ref: &ComponentSourceRef) -> ComponentSource {
        let template_code = source_ref.inline_template_code.clone().unwrap_or_default();
        let logic_code = if source_ref.framework.single_file_components() {
            template_code.clone()
        } else {
            String::new()
        };
        ComponentSource {
            id: source_ref.id(),
            framework: source_ref.framework,
            template_code,
            style_code: source_ref.inline_style_codes.join("\n"),
            logic_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uisim_corpus::{ComponentKey, RepoId};

    fn angular_ref() -> ComponentSourceRef {
        let key = ComponentKey::new(
            RepoId::new("github.com", "acme", "admin"),
            "src/app/card.component.ts",
            "CardComponent",
        );
        ComponentSourceRef::single_file(key, UiFramework::Angular, "/repos/admin")
    }

    #[test]
    fn test_inline_loader_uses_inline_code() {
        let mut source_ref = angular_ref();
        source_ref.inline_template_code = Some("<div class=\"card\"></div>".to_string());
        source_ref.inline_style_codes = vec![".card { color: red; }".to_string(), ".x {}".to_string()];

        let source = InlineSourceLoader.load(&source_ref);
        assert_eq!(source.id, "github.com/acme/admin:src/app/card.component.ts#CardComponent");
        assert_eq!(source.framework, UiFramework::Angular);
        assert_eq!(source.template_code, "<div class=\"card\"></div>");
        assert_eq!(source.style_code, ".card { color: red; }\n.x {}");
        assert!(source.logic_code.is_empty());
    }

    #[test]
    fn test_inline_loader_single_file_shares_template_and_logic() {
        let key = ComponentKey::new(RepoId::new("github.com", "acme", "web"), "src/Button.tsx", "Button");
        let mut source_ref = ComponentSourceRef::single_file(key, UiFramework::React, "/repos/web");
        let code = "export const Button = () => <button onClick={go}>Go</button>;";
        source_ref.inline_template_code = Some(code.to_string());

        let source = InlineSourceLoader.load(&source_ref);
        assert_eq!(source.template_code, code);
        assert_eq!(source.logic_code, code);
    }

    #[test]
    fn test_inline_loader_degrades_to_empty() {
        let source = InlineSourceLoader.load(&angular_ref());
        assert!(source.template_code.is_empty());
        assert!(source.style_code.is_empty());
        assert!(source.logic_code.is_empty());
    }
}
