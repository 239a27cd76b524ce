// Confirmation prompt - awaited user yes/no decision
use async_trait::async_trait;

/// Asks the user a yes/no question and resolves with the answer.
///
/// The prompt is awaited rather than blocking, so the single-threaded
/// session scheduler keeps running while the dialog is open.
#[async_trait]
pub trait ConfirmationPrompt: Send + Sync {
    async fn confirm(&self, message: &str) -> bool;
}

/// Prompt that answers every question with a fixed response. Useful for
/// headless embeddings that want to always (or never) discard changes.
pub struct AutoConfirm {
    pub accept: bool,
}

#[async_trait]
impl ConfirmationPrompt for AutoConfirm {
    async fn confirm(&self, _message: &str) -> bool {
        self.accept
    }
}
