use crate::domain::Descriptor;
use crate::error::Error;

/// The string a process's descriptor must contain to be terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetSignature(String);

impl TargetSignature {
    /// An empty signature would match every process, so it is refused.
    ///
    /// `config::Config::validate` rejects the same value when a whole
    /// configuration is loaded. This check guards signatures built directly
    /// through the library, without a `Config`.
    pub fn new(signature: impl Into<String>) -> Result<Self, Error> {
        let signature = signature.into();
        if signature.is_empty() {
            return Err(Error::EmptySignature);
        }
        Ok(Self(signature))
    }

    /// Case-sensitive, unanchored substring match.
    pub fn is_match(&self, descriptor: &Descriptor) -> bool {
        descriptor.as_str().contains(self.0.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
