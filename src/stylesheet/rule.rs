use crate::declaration::Declaration;

/// A single resolved CSS rule.
#[derive(Debug, Clone, PartialEq)]
pub struct CssRule {
    /// Full CSS selector, e.g. `.padding-0`, `.color-1:hover`, `.list-0>li`
    pub selector: String,
    /// CSS declarations, e.g. `[("padding", "16px")]`
    pub declarations: Vec<(String, String)>,
    /// Optional wrapping media query, e.g. `(prefers-color-scheme: dark)`
    pub media_query: Option<String>,
}

impl CssRule {
    /// Builds the rule a generated class stands for.
    pub fn for_class(class: &str, declaration: &Declaration, pretty: bool) -> Self {
        let mut base = format!(".{}", class);
        if let Some(pseudo) = &declaration.pseudo {
            base.push_str(pseudo);
        }
        let selector = match &declaration.selector {
            Some(scope) => scope.wrap(&base, pretty),
            None => base,
        };
        Self {
            selector: escape_css(&selector),
            declarations: vec![(
                escape_css(&declaration.property),
                escape_css(&declaration.value),
            )],
            media_query: declaration.media.clone(),
        }
    }

    fn write(&self, css: &mut String, pretty: bool, indent: &str) {
        if pretty {
            css.push_str(indent);
            css.push_str(&self.selector);
            css.push_str(" {\n");
            for (prop, val) in &self.declarations {
                css.push_str(indent);
                css.push_str("  ");
                css.push_str(prop);
                css.push_str(": ");
                css.push_str(val);
                css.push_str(";\n");
            }
            css.push_str(indent);
            css.push_str("}\n");
        } else {
            css.push_str(&self.selector);
            css.push('{');
            let body: Vec<String> = self
                .declarations
                .iter()
                .map(|(prop, val)| format!("{}:{}", prop, val))
                .collect();
            css.push_str(&body.join(";"));
            css.push('}');
        }
    }
}

/// Escapes `<` so no stylesheet text can close the surrounding `<style>`.
pub fn escape_css(text: &str) -> String {
    text.replace('<', "\\3c ")
}

/// Rules sharing one media scope; `media_query` is `None` for plain rules.
#[derive(Debug, Clone, PartialEq)]
pub struct RuleGroup {
    pub media_query: Option<String>,
    pub rules: Vec<CssRule>,
}

/// Buckets rules by media query: plain rules first, then one group per
/// distinct query in order of first appearance. Rule order inside a group
/// is preserved.
pub fn group_rules(rules: Vec<CssRule>) -> Vec<RuleGroup> {
    let mut plain = RuleGroup {
        media_query: None,
        rules: Vec::new(),
    };
    let mut media: Vec<RuleGroup> = Vec::new();

    for rule in rules {
        match &rule.media_query {
            None => plain.rules.push(rule),
            Some(query) => match media.iter_mut().find(|g| g.media_query.as_ref() == Some(query)) {
                Some(group) => group.rules.push(rule),
                None => media.push(RuleGroup {
                    media_query: Some(query.clone()),
                    rules: vec![rule],
                }),
            },
        }
    }

    let mut groups = Vec::with_capacity(media.len() + 1);
    if !plain.rules.is_empty() {
        groups.push(plain);
    }
    groups.extend(media);
    groups
}

/// Serializes grouped rules. Compact output has no whitespace at all.
pub fn render_groups(groups: &[RuleGroup], pretty: bool) -> String {
    let mut css = String::new();
    for group in groups {
        match &group.media_query {
            None => {
                for rule in &group.rules {
                    rule.write(&mut css, pretty, "");
                }
            }
            Some(query) => {
                css.push_str("@media ");
                css.push_str(query);
                css.push_str(if pretty { " {\n" } else { "{" });
                for rule in &group.rules {
                    rule.write(&mut css, pretty, "  ");
                }
                css.push_str(if pretty { "}\n" } else { "}" });
            }
        }
    }
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declaration::{Selector, StyleContext};
    use crate::variants::{MediaQuery, Pseudo};
    use pretty_assertions::assert_eq;

    fn rule(class: &str, decl: Declaration) -> CssRule {
        CssRule::for_class(class, &decl, false)
    }

    #[test]
    fn selector_includes_pseudo_and_scope() {
        let ctx = StyleContext::pseudo(Pseudo::Hover)
            .merge(&StyleContext::selector(Selector::Descendant("a".into())));
        let r = rule("color-0", ctx.declare("color", "red"));
        assert_eq!(r.selector, ".color-0:hover a");
    }

    #[test]
    fn plain_rules_come_before_media_groups() {
        let dark = StyleContext::media(MediaQuery::dark());
        let rules = vec![
            rule("color-0", dark.declare("color", "#fff")),
            rule("padding-0", Declaration::new("padding", "16px")),
            rule("color-1", dark.declare("background-color", "#000")),
        ];
        let groups = group_rules(rules);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].media_query, None);
        assert_eq!(groups[1].rules.len(), 2);
    }

    #[test]
    fn compact_rendering() {
        let dark = StyleContext::media(MediaQuery::dark());
        let groups = group_rules(vec![
            rule("padding-0", Declaration::new("padding", "16px")),
            rule("color-0", dark.declare("color", "#fff")),
        ]);
        assert_eq!(
            render_groups(&groups, false),
            ".padding-0{padding:16px}@media (prefers-color-scheme: dark){.color-0{color:#fff}}"
        );
    }

    #[test]
    fn pretty_rendering() {
        let dark = StyleContext::media(MediaQuery::dark());
        let groups = group_rules(vec![
            rule("padding-0", Declaration::new("padding", "16px")),
            rule("color-0", dark.declare("color", "#fff")),
        ]);
        let expected = "\
.padding-0 {
  padding: 16px;
}
@media (prefers-color-scheme: dark) {
  .color-0 {
    color: #fff;
  }
}
";
        assert_eq!(render_groups(&groups, true), expected);
    }

    #[test]
    fn angle_brackets_are_escaped() {
        let r = rule("content-0", Declaration::new("content", "\"</style>\""));
        assert_eq!(r.declarations[0].1, "\"\\3c /style>\"");
        let css = render_groups(&group_rules(vec![r]), false);
        assert!(!css.contains("</"));
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert_eq!(render_groups(&group_rules(Vec::new()), false), "");
    }
}
