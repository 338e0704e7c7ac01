//! Minimal ElementPath lookups over [`Element`] trees.
//!
//! Supported forms: `Tag`, `A/B/C`, `.` (the node itself), a leading `.//`
//! (first step matched against every descendant) and one `[@attr="value"]`
//! predicate per step.

use super::Element;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Step {
    tag: String,
    predicate: Option<(String, String)>,
}

impl Step {
    fn parse(raw: &str) -> Step {
        if let Some((tag, rest)) = raw.split_once('[')
            && let Some(predicate) = parse_predicate(rest)
        {
            return Step {
                tag: tag.to_string(),
                predicate: Some(predicate),
            };
        }
        Step {
            tag: raw.to_string(),
            predicate: None,
        }
    }

    fn matches(&self, element: &Element) -> bool {
        if self.tag != "*" && element.tag != self.tag {
            return false;
        }
        match &self.predicate {
            Some((name, value)) => element.attribute(name) == Some(value.as_str()),
            None => true,
        }
    }
}

/// `@name="value"]` or `@name='value']`
fn parse_predicate(rest: &str) -> Option<(String, String)> {
    let body = rest.strip_suffix(']')?.strip_prefix('@')?;
    let (name, quoted) = body.split_once('=')?;
    let value = quoted
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .or_else(|| quoted.strip_prefix('\'').and_then(|v| v.strip_suffix('\'')))?;
    Some((name.trim().to_string(), value.to_string()))
}

/// A parsed lookup path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementPath {
    descendant_first: bool,
    steps: Vec<Step>,
}

impl ElementPath {
    pub fn parse(path: &str) -> ElementPath {
        let (descendant_first, rest) = match path.strip_prefix(".//") {
            Some(rest) => (true, rest),
            None => (false, path.strip_prefix("./").unwrap_or(path)),
        };

        let steps = rest
            .split('/')
            .filter(|step| !step.is_empty() && *step != ".")
            .map(Step::parse)
            .collect();

        ElementPath {
            descendant_first,
            steps,
        }
    }

    /// Every match below `root`, in document order. An empty path matches `root`.
    pub fn find_all<'a>(&self, root: &'a Element) -> Vec<&'a Element> {
        let Some((first, rest)) = self.steps.split_first() else {
            return vec![root];
        };

        let mut current: Vec<&'a Element> = if self.descendant_first {
            root.descendants()
                .into_iter()
                .filter(|element| first.matches(element))
                .collect()
        } else {
            root.children.iter().filter(|child| first.matches(child)).collect()
        };

        for step in rest {
            current = current
                .into_iter()
                .flat_map(|element| element.children.iter())
                .filter(|child| step.matches(child))
                .collect();
        }

        current
    }

    pub fn find<'a>(&self, root: &'a Element) -> Option<&'a Element> {
        self.find_all(root).into_iter().next()
    }
}
