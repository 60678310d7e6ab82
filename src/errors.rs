use chrono::NaiveDate;
use thiserror::Error;

use crate::decimal::{Money, Rate};

#[derive(Error, Debug)]
pub enum FleetError {
    #[error("invalid tenure: {months} months")]
    InvalidTenure {
        months: u32,
    },

    #[error("negative principal: {principal}")]
    NegativePrincipal {
        principal: Money,
    },

    #[error("negative interest rate: {rate}")]
    NegativeRate {
        rate: Rate,
    },

    #[error("invalid installment amount: {amount}")]
    InvalidInstallment {
        amount: Money,
    },

    #[error("negative revenue: {revenue}")]
    NegativeRevenue {
        revenue: Money,
    },

    #[error("invalid date: {message}")]
    InvalidDate {
        message: String,
    },

    #[error("installment not found: month {month}")]
    InstallmentNotFound {
        month: u32,
    },

    #[error("installment already paid: month {month}")]
    InstallmentAlreadyPaid {
        month: u32,
    },

    #[error("payment window not open for month {month}: due {due_date} is {days_until_due} days away")]
    PaymentOutsideWindow {
        month: u32,
        due_date: NaiveDate,
        days_until_due: i64,
    },

    #[error("loan fully settled")]
    LoanSettled,
}

pub type Result<T> = std::result::Result<T, FleetError>;
