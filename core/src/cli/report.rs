use crate::api::ScanMetadata;
use std::fmt;

/// Text report formatter for scan metadata
pub struct TextReport<'a> {
    metadata: &'a ScanMetadata,
}

impl<'a> TextReport<'a> {
    /// Creates a new text report
    pub fn new(metadata: &'a ScanMetadata) -> Self {
        Self { metadata }
    }
}

impl<'a> fmt::Display for TextReport<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scan Metadata")?;
        writeln!(f, "=============")?;
        writeln!(f)?;
        writeln!(f, "Manufacturer:    {}", self.metadata.manufacturer)?;
        writeln!(f, "Model:           {}", self.metadata.model)?;
        writeln!(f, "Protocol:        {}", self.metadata.protocol)?;
        writeln!(f, "Sequence:        {}", self.metadata.sequence_name)?;
        writeln!(f, "Series UID:      {}", self.metadata.series_instance_uid)?;
        writeln!(f, "SOP UID:         {}", self.metadata.sop_instance_uid)?;
        writeln!(f, "Series Number:   {}", self.metadata.series_number)?;
        writeln!(f, "Date:            {}", self.metadata.acquisition_date)?;
        writeln!(
            f,
            "Creation Time:   {}",
            self.metadata
                .instance_creation_time
                .map(|t| t.to_string())
                .unwrap_or_else(|| "unknown".to_string())
        )?;
        writeln!(f, "Enhanced:        {}", self.metadata.enhanced_storage)?;
        writeln!(
            f,
            "TR (ms):         {}",
            self.metadata.repetition_time_ms.as_deref().unwrap_or("unknown")
        )?;
        writeln!(f, "TE:              {}", self.metadata.echo_time)?;
        writeln!(
            f,
            "Phase Encoding:  {}",
            self.metadata.phase_encoding.as_deref().unwrap_or("unknown")
        )?;
        writeln!(f, "Slices:          {}", self.metadata.number_of_slices)?;
        writeln!(f, "Volumes:         {}", self.metadata.temporal_positions)?;
        writeln!(f, "Run Number:      {}", self.metadata.raw_data_run_number)?;
        writeln!(f)?;

        // Additional derived information
        writeln!(f, "Derived Properties")?;
        writeln!(f, "------------------")?;
        writeln!(f, "Diffusion:       {}", self.metadata.is_diffusion())?;
        if self.metadata.is_diffusion() {
            writeln!(f, "B-Values:        {:?}", self.metadata.b_values)?;
            writeln!(f, "B-Vectors:       {}", self.metadata.b_vectors.len())?;
        }
        writeln!(f, "Time Series:     {}", self.metadata.is_time_series())?;

        Ok(())
    }
}
