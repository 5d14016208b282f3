//! User model -> entity mapper

use wallet_core::entities::User;

use crate::models::UserModel;

impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            username: model.username,
            balance: model.balance,
            chat_id: model.chat_id,
            created_at: model.created_at,
        }
    }
}
