//! Account service configuration

/// Configuration for the account service
#[derive(Debug, Clone)]
pub struct AccountServiceConfig {
    /// Subject line of the activation email
    pub activation_subject: String,

    /// Subject line of the password recovery email
    pub recovery_subject: String,

    /// Bcrypt cost factor for password hashing
    pub bcrypt_cost: u32,
}

impl Default for AccountServiceConfig {
    fn default() -> Self {
        Self {
            activation_subject: String::from("Activate your LearnHub account"),
            recovery_subject: String::from("Password recovery"),
            bcrypt_cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl AccountServiceConfig {
    /// Lower the bcrypt cost, for test setups where hashing speed matters
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }
}
