use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;

/// unique identifier for a fleet vehicle
pub type VehicleId = Uuid;

/// who holds a vehicle's equity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OwnershipType {
    /// the fleet company owns the vehicle outright
    Company,
    /// an investing partner funds the vehicle and takes a profit share
    Partner,
}

/// expense categories recorded against a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Maintenance,
    Fuel,
    Insurance,
    Fine,
    Other,
}

/// amortization outcome over the emitted schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScheduleHealth {
    /// outstanding principal reaches zero at or before the last installment
    FullyAmortized,
    /// the installment never covers accrued interest and principal is left over
    UnamortizedBalance { remaining: Money },
}
