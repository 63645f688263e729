pub(crate) mod debug;
pub(crate) mod inputs;
pub(crate) mod timezone;

pub(crate) use debug::{debug_enabled, debug_log, set_debug};
pub(crate) use inputs::expand_inputs;
pub(crate) use timezone::Timezone;
