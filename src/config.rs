include!(concat!(env!("OUT_DIR"), "/croissound_config.rs"));
