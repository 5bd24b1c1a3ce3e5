/// Fixed client-facing error messages. Injected into the handler state at
/// construction time; internal error detail never reaches the client.
#[derive(Debug, Clone)]
pub struct Messages {
    pub invalid_id: &'static str,
    pub invalid_json: &'static str,
    pub create_failed: &'static str,
    pub list_failed: &'static str,
    pub not_found: &'static str,
    pub update_failed: &'static str,
    pub delete_failed: &'static str,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            invalid_id: "Invalid user id",
            invalid_json: "Could not decode the JSON payload",
            create_failed: "Could not create the user",
            list_failed: "Could not fetch the users",
            not_found: "User not found",
            update_failed: "Could not update the user",
            delete_failed: "Could not delete the user",
        }
    }
}
