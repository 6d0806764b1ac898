pub mod account;
pub mod error;
pub mod io;
pub mod link;
pub mod logging;
pub mod payment;
pub mod timestamp;
pub mod transaction;

pub use account::BankAccount;
pub use error::PaymentResourceError;
pub use link::Link;
pub use payment::PaymentResource;
pub use transaction::TransactionType;
