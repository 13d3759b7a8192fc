use serde::{Deserialize, Serialize};

/// A fixed persona bound to one text-generation participant.
///
/// Built once at process start from static configuration and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSpec {
    /// Unique name of the role within a composition.
    pub name: String,
    /// System prompt handed to the generation capability.
    pub instruction: String,
    /// Human-readable summary.
    pub description: String,
}

impl RoleSpec {
    pub fn new(name: impl Into<String>, instruction: impl Into<String>) -> Self {
        Self { name: name.into(), instruction: instruction.into(), description: String::new() }
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = desc.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_spec_creation() {
        let spec = RoleSpec::new("Judge", "You are the judge.")
            .with_description("Hands down the final verdict.");
        assert_eq!(spec.name, "Judge");
        assert_eq!(spec.instruction, "You are the judge.");
        assert_eq!(spec.description, "Hands down the final verdict.");
    }

    #[test]
    fn test_role_spec_serde_roundtrip() {
        let spec = RoleSpec::new("Prosecutor", "Argue for guilt.");
        let encoded = serde_json::to_string(&spec).unwrap();
        let decoded: RoleSpec = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, spec);
    }
}
