mod capture;
mod recorder;
mod sound_bank;
mod wav;
