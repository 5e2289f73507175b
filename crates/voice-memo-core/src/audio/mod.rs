//! Desktop audio backend built on cpal and hound.

pub(crate) mod capture;
mod player;
mod recorder;
mod sound_bank;
pub(crate) mod wav;

pub use {
    capture::{AudioCapturer, CapturedAudio},
    player::CpalPlayer,
    recorder::CpalRecorder,
    sound_bank::SoundBank,
    wav::{read_wav, write_wav},
};
