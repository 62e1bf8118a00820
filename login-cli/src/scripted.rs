// Provider stand-in that answers with an outcome chosen on the command line
use async_trait::async_trait;
use social_auth::{AuthFailure, AuthSuccess, AuthenticationProvider, Provider, SignInResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Script {
    Succeed,
    SettleWithoutIdentity,
    Fail { code: String, message: Option<String> },
}

#[derive(Debug, Clone)]
pub struct ScriptedAuthenticator {
    script: Script,
}

impl ScriptedAuthenticator {
    pub fn new(script: Script) -> Self {
        Self { script }
    }
    
    fn answer(&self, provider: Provider) -> SignInResult {
        match &self.script {
            Script::Succeed => Ok(Some(AuthSuccess::new(format!("{provider}-scripted-user")))),
            Script::SettleWithoutIdentity => Ok(None),
            Script::Fail { code, message } => {
                let failure = AuthFailure::new(code.clone());
                Err(match message {
                    Some(message) => failure.with_message(message.clone()),
                    None => failure,
                })
            }
        }
    }
}

#[async_trait]
impl AuthenticationProvider for ScriptedAuthenticator {
    async fn sign_in_with_google(&self) -> SignInResult {
        self.answer(Provider::Google)
    }
    
    async fn sign_in_with_facebook(&self) -> SignInResult {
        self.answer(Provider::Facebook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    #[tokio::test]
    async fn test_success_script() {
        let authenticator = ScriptedAuthenticator::new(Script::Succeed);
        let identity = authenticator.sign_in_with_facebook().await.unwrap().unwrap();
        assert_eq!(identity.uid, "facebook-scripted-user");
    }
    
    #[tokio::test]
    async fn test_failure_script() {
        let authenticator = ScriptedAuthenticator::new(Script::Fail {
            code: "auth/popup-blocked".to_string(),
            message: Some("blocked".to_string()),
        });
        let failure = authenticator.sign_in_with_google().await.unwrap_err();
        assert_eq!(failure.code, "auth/popup-blocked");
        assert_eq!(failure.message.as_deref(), Some("blocked"));
    }
}
