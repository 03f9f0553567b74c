use regex::Regex;
use serde::Deserialize;
use serde_json::Value;
use std::sync::OnceLock;

/// Property key that carries the tactic identifier on an action object.
pub const TACTIC_KEY: &str = "tactic_id";

/// Template kind of the objects that participate in sequencing.
pub const ACTION_TEMPLATE: &str = "action";

// ---------------------------------------------------------------------------
// Tactic identifier validation
// ---------------------------------------------------------------------------

static TACTIC_RE: OnceLock<Regex> = OnceLock::new();

fn tactic_re() -> &'static Regex {
    TACTIC_RE.get_or_init(|| Regex::new(r"^TA[0-9]+$").unwrap())
}

/// True if `value` is a well-formed tactic identifier (`TA` followed by digits).
pub fn is_tactic_id(value: &str) -> bool {
    tactic_re().is_match(value)
}

// ---------------------------------------------------------------------------
// FlowDocument / FlowObject
// ---------------------------------------------------------------------------

/// One parsed attack-flow document.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowDocument {
    #[serde(default)]
    pub objects: Vec<FlowObject>,
}

/// An element of a flow document.
#[derive(Debug, Clone, Deserialize)]
pub struct FlowObject {
    #[serde(default)]
    pub template: Option<String>,
    /// `[key, value]` pairs; values are arbitrary JSON.
    #[serde(default)]
    pub properties: Option<Vec<(String, Value)>>,
}

impl FlowObject {
    pub fn is_action(&self) -> bool {
        self.template.as_deref() == Some(ACTION_TEMPLATE)
    }

    /// The object's tactic identifier: the first `tactic_id` property whose
    /// value is a non-null string matching the identifier pattern.
    pub fn tactic_id(&self) -> Option<&str> {
        let properties = self.properties.as_deref()?;
        properties.iter().find_map(|(key, value)| {
            if key != TACTIC_KEY {
                return None;
            }
            value.as_str().filter(|id| is_tactic_id(id))
        })
    }
}

impl FlowDocument {
    /// Tactic identifiers of the document's action objects, in document
    /// order. Objects without a qualifying identifier are skipped.
    pub fn tactic_sequence(&self) -> impl Iterator<Item = &str> {
        self.objects
            .iter()
            .filter(|o| o.is_action())
            .filter_map(FlowObject::tactic_id)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
