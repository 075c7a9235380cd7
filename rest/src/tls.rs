//! Server certificate trust strategies.

use reqwest::blocking::ClientBuilder;
use reqwest::Certificate;

use crate::error::InvalidRequestError;

const PEM_CERTIFICATE_MARKER: &str = "-----BEGIN CERTIFICATE-----";

/// How server certificates are checked during the TLS handshake.
///
/// The default verifies certificates against the bundled web PKI roots.
/// [`TrustPolicy::Disabled`] must be chosen explicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TrustPolicy {
    /// Verify the server chain against the default roots.
    #[default]
    Verify,
    /// Verify, additionally trusting the given PEM-encoded certificate.
    ///
    /// Used for servers presenting a self-signed or private-CA certificate.
    Pem(String),
    /// Accept any server certificate.
    ///
    /// Leaves the connection open to interception.
    Disabled,
}

impl TrustPolicy {
    /// Returns `true` unless verification was turned off.
    pub fn verifies_certificates(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Checks that a configured PEM looks like a certificate.
    ///
    /// ## Errors
    ///
    /// Returns [`InvalidRequestError::InvalidCertificate`] if the PEM has no
    /// certificate block.
    pub fn validate(&self) -> Result<(), InvalidRequestError> {
        match self {
            Self::Pem(pem) if !pem.contains(PEM_CERTIFICATE_MARKER) => Err(
                InvalidRequestError::InvalidCertificate("no certificate block found".to_string()),
            ),
            _ => Ok(()),
        }
    }

    /// Applies the policy to a transport client builder.
    pub(crate) fn apply(
        &self,
        builder: ClientBuilder,
    ) -> Result<ClientBuilder, InvalidRequestError> {
        self.validate()?;
        match self {
            Self::Verify => Ok(builder),
            Self::Pem(pem) => {
                let certificate = Certificate::from_pem(pem.as_bytes())
                    .map_err(|e| InvalidRequestError::InvalidCertificate(e.to_string()))?;
                Ok(builder.add_root_certificate(certificate))
            }
            Self::Disabled => Ok(builder.danger_accept_invalid_certs(true)),
        }
    }
}
