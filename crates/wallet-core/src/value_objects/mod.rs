//! Value objects - immutable types that represent domain concepts

mod amount;
mod payment_method;
mod username;

pub use amount::Amount;
pub use payment_method::PaymentMethod;
pub use username::Username;
