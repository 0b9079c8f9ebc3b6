//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。

pub mod connect_payment_method;
pub mod disconnect_payment_method;
pub mod error;
pub mod fetch_association;
pub mod register_user;

pub use connect_payment_method::ConnectPaymentMethodUseCase;
pub use disconnect_payment_method::DisconnectPaymentMethodUseCase;
pub use error::AssociationError;
pub use fetch_association::FetchAssociationUseCase;
pub use register_user::{RegisterUserUseCase, UserProfile};
