//! Host lifecycle capability

/// Control calls back into the watch's face dispatcher
pub trait HostControl {
    /// Ask the host to switch to the next face
    fn request_next_face(&mut self);

    /// Ask the host to deliver ticks at the given frequency
    fn request_tick_frequency(&mut self, hz: u8);
}
