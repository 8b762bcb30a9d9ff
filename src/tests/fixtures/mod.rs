pub mod events {
    pub mod event_builder;
}

pub mod id_generators {
    pub mod sequence;
}

pub mod state;
