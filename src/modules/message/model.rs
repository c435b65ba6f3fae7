#[derive(Debug, Clone)]
pub struct InsertMessage {
    pub room_name: String,
    pub sender: String,
    pub content: String,
}
