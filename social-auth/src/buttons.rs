use serde::Serialize;

use crate::provider::Provider;
use crate::state::AttemptSnapshot;

pub const DIVIDER_LABEL: &str = "Or continue with";
pub const POPUP_HELP_TEXT: &str = "Having trouble? Make sure popups are enabled for this site.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialButton {
    pub provider: Provider,
    pub label: &'static str,
    pub disabled: bool,
}

/// Framework-neutral description of the social sign-in block.
///
/// Rendering (markup, icons, styling) is left to the UI layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialButtonPanel {
    pub divider_label: &'static str,
    pub buttons: Vec<SocialButton>,
    pub help_text: &'static str,
    /// Current error, if any
    pub error_message: Option<String>,
}

impl SocialButtonPanel {
    pub fn from_snapshot(snapshot: &AttemptSnapshot) -> Self {
        let buttons = Provider::ALL
            .iter()
            .map(|&provider| SocialButton {
                provider,
                label: provider.display_name(),
                disabled: snapshot.busy,
            })
            .collect();
        
        Self {
            divider_label: DIVIDER_LABEL,
            buttons,
            help_text: POPUP_HELP_TEXT,
            error_message: Some(snapshot.error_message.clone()).filter(|m| !m.is_empty()),
        }
    }
    
    pub fn button(&self, provider: Provider) -> Option<&SocialButton> {
        self.buttons.iter().find(|button| button.provider == provider)
    }
    
    /// Provider to sign in with when its button is pressed; `None` while the
    /// button is disabled.
    pub fn press(&self, provider: Provider) -> Option<Provider> {
        self.button(provider)
            .filter(|button| !button.disabled)
            .map(|button| button.provider)
    }
}
