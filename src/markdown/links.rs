//! Link resolution for class and member references.

use regex::Regex;
use std::sync::LazyLock;

use crate::context::RenderContext;
use crate::relations::{ClassDescriptor, MemberDescriptor, Relations};
use crate::template::Template;
use crate::util::escape_text;
use crate::warning::{WarningKind, Warnings};

/// Capitalized, possibly dotted name with optional `#member`, delimited by
/// whitespace or string boundaries. Trailing `.` or `,` stays outside the
/// name.
static CLASS_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\A|\s)([A-Z][A-Za-z0-9.]*[A-Za-z0-9])(?:(#)([A-Za-z0-9]+))?([.,]?)(?:\s|\z)")
        .expect("class name pattern compiles")
});

/// Parsed `{@link}` target.
///
/// `Class#kind-member`, `Class#member`, `#member` or plain `Class`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkTarget<'t> {
    pub class: &'t str,
    pub kind: Option<&'t str>,
    pub member: Option<&'t str>,
}

impl<'t> LinkTarget<'t> {
    /// Parses link target, filling in context class for `#member` targets.
    ///
    /// Splits at the last `#`, then splits the member part at its last `-`
    /// into kind and name.
    pub fn parse(target: &'t str, context_class: &'t str) -> Self {
        let Some((class, rest)) = target.rsplit_once('#') else {
            return Self {
                class: target,
                kind: None,
                member: None,
            };
        };

        let class = if class.is_empty() { context_class } else { class };
        let (kind, member) = match rest.rsplit_once('-') {
            Some((kind, member)) => (Some(kind), member),
            None => (None, rest),
        };

        Self {
            class,
            kind,
            member: Some(member),
        }
    }
}

/// Resolves class references into links for one render call.
///
/// Links are built from the link template using the canonical class name,
/// so references through alternate class names point at the real page.
pub struct LinkResolver<'r> {
    relations: &'r dyn Relations,
    template: &'r Template,
    context: &'r RenderContext,
}

impl<'r> LinkResolver<'r> {
    /// Creates resolver for given relations, link template and context.
    ///
    /// # Arguments
    ///
    /// * `relations`: Known classes and members
    /// * `template`: Link template (`%c`, `%m`, `%#`, `%-`, `%a`)
    /// * `context`: Current class and document
    pub fn new(relations: &'r dyn Relations, template: &'r Template, context: &'r RenderContext) -> Self {
        Self {
            relations,
            template,
            context,
        }
    }

    /// Replaces a `{@link}` tag with an anchor.
    ///
    /// Unresolvable references degrade to their anchor text with a warning.
    ///
    /// # Arguments
    ///
    /// * `raw`: Whole tag as written, used in warnings
    /// * `target`: Link target (`Class#member`)
    /// * `text`: Explicit anchor text
    /// * `warnings`: Collector for unresolved references
    ///
    /// # Returns
    ///
    /// Anchor HTML or plain fallback text
    pub(crate) fn resolve_tag(
        &self,
        raw: &str,
        target: &str,
        text: Option<&str>,
        warnings: &mut Warnings,
    ) -> String {
        let target = LinkTarget::parse(target, self.context.class());

        let text = match (text, target.member) {
            (Some(text), _) => text.to_string(),
            (None, Some(member)) if target.class == self.context.class() => member.to_string(),
            (None, Some(member)) => format!("{}.{}", target.class, member),
            (None, None) => target.class.to_string(),
        };

        let Some(class) = self.relations.class(target.class) else {
            warnings.push(WarningKind::MissingClass, self.context.location(), raw);
            return text;
        };

        let member = match target.member {
            Some(name) => match class.member(name, target.kind) {
                Some(member) => Some(member),
                None => {
                    warnings.push(WarningKind::MissingMember, self.context.location(), raw);
                    return text;
                }
            },
            None => None,
        };

        self.link(class, member, &text)
    }

    /// Turns recognized class names in plain text into links.
    ///
    /// A name gets linked when the class exists and either a `#member` was
    /// given that resolves, or the name contains a dot. Single capitalized
    /// words are left alone since ordinary prose is full of them.
    pub fn auto_link(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut pos = 0;

        // Delimiting whitespace after a name stays unconsumed so it can
        // lead the next name.
        while let Some(caps) = CLASS_NAME.captures_at(text, pos) {
            let (Some(whole), Some(name), Some(punct)) = (caps.get(0), caps.get(2), caps.get(5)) else {
                break;
            };
            let before = caps.get(1).map_or("", |m| m.as_str());
            let hash = caps.get(3).map_or("", |m| m.as_str());
            let member_name = caps.get(4).map(|m| m.as_str());
            let name = name.as_str();

            out.push_str(&text[pos..whole.start()]);
            out.push_str(before);
            match self.auto_target(name, member_name) {
                Some((class, member)) => {
                    let label = match member_name {
                        Some(m) => format!("{}.{}", name, m),
                        None => name.to_string(),
                    };
                    out.push_str(&self.link(class, member, &label));
                }
                None => {
                    out.push_str(name);
                    out.push_str(hash);
                    out.push_str(member_name.unwrap_or(""));
                }
            }
            out.push_str(punct.as_str());
            pos = punct.end();
        }

        out.push_str(&text[pos..]);
        out
    }

    fn auto_target(
        &self,
        name: &str,
        member_name: Option<&str>,
    ) -> Option<(&'r ClassDescriptor, Option<&'r MemberDescriptor>)> {
        let class = self.relations.class(name)?;
        match member_name {
            Some(m) => class.member(m, None).map(|member| (class, Some(member))),
            None => name.contains('.').then_some((class, None)),
        }
    }

    /// Applies the link template.
    fn link(&self, class: &ClassDescriptor, member: Option<&MemberDescriptor>, anchor_text: &str) -> String {
        let fragment = member.map(MemberDescriptor::fragment);

        self.template.render(|key| match key {
            'c' => Some(class.full_name().to_string()),
            'm' => Some(fragment.clone().unwrap_or_default()),
            '#' => Some(if fragment.is_some() { "#" } else { "" }.to_string()),
            '-' => Some(if fragment.is_some() { "-" } else { "" }.to_string()),
            'a' => Some(escape_text(anchor_text)),
            _ => None,
        })
    }
}
