pub mod account_repo;
pub use account_repo::AccountRepository;
pub mod customer_repo;
pub use customer_repo::CustomerRepository;
pub mod dealer_repo;
pub use dealer_repo::DealerRepository;
pub mod expert_repo;
pub use expert_repo::ExpertRepository;
