use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::VehicleId;

/// all events emitted by a vehicle loan account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    ScheduleGenerated {
        vehicle_id: VehicleId,
        principal: Money,
        installment_count: u32,
        timestamp: DateTime<Utc>,
    },
    /// outstanding principal reached zero before the full tenure
    ScheduleShortClosed {
        vehicle_id: VehicleId,
        months_emitted: u32,
        tenure_months: u32,
    },
    /// the fixed installment cannot amortize the loan within its tenure
    UnamortizedBalanceDetected {
        vehicle_id: VehicleId,
        remaining: Money,
    },
    InstallmentPaid {
        vehicle_id: VehicleId,
        month: u32,
        amount: Money,
        paid_date: NaiveDate,
        timestamp: DateTime<Utc>,
    },
    LoanSettled {
        vehicle_id: VehicleId,
        total_paid: Money,
        timestamp: DateTime<Utc>,
    },
}

/// event store for collecting events during operations
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
        }
    }

    pub fn emit(&mut self, event: Event) {
        self.events.push(event);
    }

    pub fn take_events(&mut self) -> Vec<Event> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}
