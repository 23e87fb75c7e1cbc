pub mod use_cases;


pub use use_cases::{
    change_password::{ChangePasswordError, ChangePasswordUseCase},
    deactivate::{DeactivateError, DeactivateUseCase},
    forgot_password::{ForgotPasswordError, ForgotPasswordUseCase},
    list_users::{ListUsersError, ListUsersUseCase},
    login::{LoginError, LoginOutcome, LoginUseCase},
    refresh_token::RefreshTokenUseCase,
    register::{RegisterError, RegisterUseCase},
    reset_password::{ResetPasswordError, ResetPasswordUseCase},
};
