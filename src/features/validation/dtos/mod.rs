mod account_dto;
mod marketplace_dto;
mod post_dto;
mod wallet_dto;

pub use account_dto::{LoginPayload, LoginRequestDto, RegisterPayload, RegisterRequestDto};
pub use marketplace_dto::{AdPayload, CreateAdRequestDto, CreateProductRequestDto, ProductPayload};
pub use post_dto::{CreatePostRequestDto, PostPayload};
pub use wallet_dto::{PixKeyType, WithdrawalPayload, WithdrawalRequestDto};
