mod read;
mod write;

/// Room inventory endpoints under `rooms`.
pub struct RoomRepository;

pub(crate) fn room_path(id: uuid::Uuid) -> String {
    format!("rooms/{}", id)
}
