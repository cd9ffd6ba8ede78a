pub mod acquisition;
pub mod dcmdump;
pub mod geometry;
pub mod identifiers;
pub mod tags;

pub use acquisition::{b_values, b_vectors, echo_time, phase_encoding, repetition_time};
pub use geometry::{number_of_slices, number_of_temporal_positions, philips_stack_slices};
pub use identifiers::{
    acquisition_date, instance_creation_time, is_enhanced_storage, manufacturer,
    manufacturer_model, protocol_name, raw_data_run_number, referenced_sop_instance_uids,
    sequence_name, series_instance_uid, series_number, sop_instance_uid,
};
pub use tags::*;
