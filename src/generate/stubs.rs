//! Stub templates compiled into the binary.

/// Every embedded stub, by name.
pub const EMBEDDED: [(&str, &str); 6] = [
    ("controller", include_str!("../../stubs/controller.stub")),
    ("controller.method", include_str!("../../stubs/controller.method.stub")),
    ("model", include_str!("../../stubs/model.stub")),
    ("model.method", include_str!("../../stubs/model.method.stub")),
    ("test", include_str!("../../stubs/test.stub")),
    ("test.case", include_str!("../../stubs/test.case.stub")),
];

/// The embedded template named `name`.
#[must_use]
pub fn embedded(name: &str) -> Option<&'static str> {
    EMBEDDED.iter().find(|(stub, _)| *stub == name).map(|(_, template)| *template)
}

/// Names of every embedded stub.
pub fn names() -> impl Iterator<Item = &'static str> {
    EMBEDDED.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_stub_has_placeholders() {
        for (name, template) in EMBEDDED {
            assert!(template.contains("{{ "), "stub {name} has no placeholders");
        }
        assert!(embedded("model").is_some());
        assert!(embedded("migration").is_none());
    }
}
