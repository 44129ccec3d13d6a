/// Branch name split into the `{product}/{kind}_{version}` convention
///
/// Examples:
/// - `payments/test_3` → product `payments`, kind `test`, version `3`
/// - `payments/fix_3_42` → product `payments`, kind `fix`, version `3`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BranchName {
    pub product: String,
    pub kind: String,
    pub version: String,
}

impl BranchName {
    pub fn new(product: String, kind: String, version: String) -> Self {
        Self { product, kind, version }
    }

    /// Parse a raw branch name, splitting on `/` and `_`
    ///
    /// Missing segments become empty strings, so this never fails.
    /// Segments past the third (the bug id of a fix branch) are ignored.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };

        let mut segments = raw.split(['/', '_']).map(str::to_string);

        Self::new(
            segments.next().unwrap_or_default(),
            segments.next().unwrap_or_default(),
            segments.next().unwrap_or_default(),
        )
    }

    pub fn is_test(&self) -> bool {
        self.kind == "test"
    }

    pub fn is_fix(&self) -> bool {
        self.kind == "fix"
    }

    /// `{product}/test_{version}`
    pub fn test_branch(&self) -> String {
        format!("{}/test_{}", self.product, self.version)
    }

    /// `{product}/fix_{version}_{bug_id}`
    pub fn fix_branch(&self, bug_id: &str) -> String {
        format!("{}/fix_{}_{}", self.product, self.version, bug_id)
    }
}
