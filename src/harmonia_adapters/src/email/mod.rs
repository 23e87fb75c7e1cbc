pub mod mock_email_notifier;
pub mod postmark_email_notifier;
