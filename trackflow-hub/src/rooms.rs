//! Production room directory
//!
//! Room provisioning is not implemented yet; the directory serves a fixed
//! catalog behind a trait so the listing endpoint and its authorization
//! behavior are real even while the data is seeded.

use chrono::TimeZone;
use trackflow_common::db::{Principal, ProductionRoom, Role, RoomStatus};
use uuid::Uuid;

/// Read-only source of production rooms
pub trait RoomDirectory: Send + Sync {
    /// Rooms visible to the principal: admins see every room, everyone
    /// else only the rooms they participate in
    fn rooms_for(&self, principal: &Principal) -> Vec<ProductionRoom>;
}

/// In-memory directory over a fixed set of rooms
pub struct SeededRooms {
    rooms: Vec<ProductionRoom>,
}

impl SeededRooms {
    pub fn new(rooms: Vec<ProductionRoom>) -> Self {
        Self { rooms }
    }

    /// Deterministic sample catalog used until provisioning exists
    pub fn with_sample_data() -> Self {
        let created = chrono::Utc
            .with_ymd_and_hms(2026, 1, 15, 12, 0, 0)
            .single()
            .unwrap_or_else(chrono::Utc::now);

        let rooms = vec![
            ProductionRoom {
                id: Uuid::from_u128(0xA1),
                demo_track_id: Uuid::from_u128(0xB1),
                artist_id: Uuid::from_u128(0xC1),
                arranger_id: Some(Uuid::from_u128(0xD1)),
                engineer_id: None,
                admin_id: Uuid::from_u128(0xE1),
                status: RoomStatus::Setup,
                created_at: created,
            },
            ProductionRoom {
                id: Uuid::from_u128(0xA2),
                demo_track_id: Uuid::from_u128(0xB2),
                artist_id: Uuid::from_u128(0xC2),
                arranger_id: Some(Uuid::from_u128(0xD2)),
                engineer_id: Some(Uuid::from_u128(0xD3)),
                admin_id: Uuid::from_u128(0xE1),
                status: RoomStatus::InProgress,
                created_at: created,
            },
            ProductionRoom {
                id: Uuid::from_u128(0xA3),
                demo_track_id: Uuid::from_u128(0xB3),
                artist_id: Uuid::from_u128(0xC1),
                arranger_id: None,
                engineer_id: Some(Uuid::from_u128(0xD3)),
                admin_id: Uuid::from_u128(0xE1),
                status: RoomStatus::Review,
                created_at: created,
            },
        ];

        Self::new(rooms)
    }
}

impl RoomDirectory for SeededRooms {
    fn rooms_for(&self, principal: &Principal) -> Vec<ProductionRoom> {
        if principal.role == Role::Admin {
            return self.rooms.clone();
        }
        self.rooms
            .iter()
            .filter(|room| room.has_participant(principal.id))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn principal(id: Uuid, role: Role) -> Principal {
        Principal {
            id,
            email: "someone@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_admin_sees_all_rooms() {
        let directory = SeededRooms::with_sample_data();
        let admin = principal(Uuid::new_v4(), Role::Admin);
        assert_eq!(directory.rooms_for(&admin).len(), 3);
    }

    #[test]
    fn test_participants_see_only_their_rooms() {
        let directory = SeededRooms::with_sample_data();

        let artist = principal(Uuid::from_u128(0xC1), Role::Artist);
        let visible = directory.rooms_for(&artist);
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|room| room.artist_id == artist.id));

        let outsider = principal(Uuid::new_v4(), Role::Engineer);
        assert!(directory.rooms_for(&outsider).is_empty());
    }
}
