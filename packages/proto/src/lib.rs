//! Generated protobuf and tonic code for the example Notes service.

pub mod notes {
    tonic::include_proto!("notes");

    /// Fully-qualified method paths of `notes.Notes`.
    pub mod methods {
        pub const GET_NOTE: &str = "/notes.Notes/GetNote";
        pub const CREATE_NOTE: &str = "/notes.Notes/CreateNote";
    }
}
