mod record_synthesizer;

pub use record_synthesizer::RecordSynthesizer;
