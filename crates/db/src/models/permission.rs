/// The set of permission codes granted to one user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Permissions(Vec<String>);

impl Permissions {
    pub fn includes(&self, code: &str) -> bool {
        self.0.iter().any(|c| c == code)
    }
}

impl From<Vec<String>> for Permissions {
    fn from(codes: Vec<String>) -> Self {
        Self(codes)
    }
}
