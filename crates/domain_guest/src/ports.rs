//! Guest Directory Ports
//!
//! The `GuestDirectoryPort` trait is the lookup boundary between the
//! billing screens and whatever system knows which guest occupies which
//! room. Multiple adapters can implement it:
//!
//! - **Static Adapter**: A fixed in-memory table with an artificial
//!   response delay, used until a property-management backend exists.
//! - **Backend Adapter**: A future HTTP or database adapter.
//!
//! ```rust,ignore
//! use domain_guest::{GuestDirectoryPort, LookupSession, StaticGuestDirectory};
//! use std::sync::Arc;
//!
//! let directory: Arc<dyn GuestDirectoryPort> = Arc::new(StaticGuestDirectory::default());
//! let session = LookupSession::new(directory);
//! ```

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal_macros::dec;

use domain_billing::{GuestType, ServiceName};

use crate::error::GuestError;
use crate::record::GuestLookupResult;

/// Async lookup boundary over the guest registry
#[async_trait]
pub trait GuestDirectoryPort: Send + Sync {
    /// Finds the registered guest for a room number
    ///
    /// Room numbers are matched after trimming surrounding whitespace.
    /// Returns `Ok(None)` when no guest is registered for the room.
    async fn find_by_room(&self, room_number: &str)
        -> Result<Option<GuestLookupResult>, GuestError>;
}

/// Fixed in-memory guest table with a simulated response delay
///
/// When more than one guest is registered for the same room, the first
/// entry in registration order wins.
pub struct StaticGuestDirectory {
    guests: Vec<GuestLookupResult>,
    delay: Duration,
}

impl StaticGuestDirectory {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

    /// Creates the directory with the standard seed table
    pub fn new(delay: Duration) -> Self {
        Self {
            guests: seed_guests(),
            delay,
        }
    }

    /// Creates a directory over a caller-supplied table
    pub fn with_guests(guests: Vec<GuestLookupResult>, delay: Duration) -> Self {
        Self { guests, delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for StaticGuestDirectory {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

#[async_trait]
impl GuestDirectoryPort for StaticGuestDirectory {
    async fn find_by_room(
        &self,
        room_number: &str,
    ) -> Result<Option<GuestLookupResult>, GuestError> {
        let key = room_number.trim();
        if key.is_empty() {
            return Err(GuestError::InvalidRoomNumber(room_number.to_string()));
        }

        tokio::time::sleep(self.delay).await;

        let hit = self
            .guests
            .iter()
            .find(|guest| guest.room_number == key)
            .cloned();
        tracing::debug!(room = key, found = hit.is_some(), "guest lookup");
        Ok(hit)
    }
}

fn seed_guests() -> Vec<GuestLookupResult> {
    vec![
        GuestLookupResult {
            guest_type: GuestType::Regular,
            registration_number: "REG-002".to_string(),
            full_name: "Jane Smith".to_string(),
            guest_email: "jane.smith@example.com".to_string(),
            room_number: "101".to_string(),
            service: ServiceName::LaundryService,
            rate: dec!(15),
            quantity: 2,
            vat: dec!(1.5),
            sd_charge: dec!(0.5),
            complimentary: false,
            remarks: "Wash & fold only".to_string(),
        },
        GuestLookupResult {
            guest_type: GuestType::Vip,
            registration_number: "REG-001".to_string(),
            full_name: "John Doe".to_string(),
            guest_email: "john.doe@example.com".to_string(),
            room_number: "101".to_string(),
            service: ServiceName::RoomCleaning,
            rate: dec!(20),
            quantity: 1,
            vat: dec!(2),
            sd_charge: dec!(1),
            complimentary: false,
            remarks: "Requested early service".to_string(),
        },
    ]
}
