pub static ENCODE_HELP: &str = "Time encoding of a decoded png framebuffer into memory

The image is decoded once, untimed, keeping its bit depth, colour type
and palette. Every trial then encodes it into a fresh in-memory buffer.

Levels 0 to 9 follow zlib. The png codec exposes presets only,
0-2 map to fast, 3-6 to default and 7-9 to best compression.

Prints each trial time in milliseconds followed by the size of the
last encoded image.";

pub static DUMP_HELP: &str = "Decode a png once and write the raw pixels to a file

Pixels are written as 8 bit samples, gray+alpha for grayscale images
and RGBA otherwise, the same layout the decode benchmark produces.";

pub static CLOCK_HELP: &str = "Clock used to time trials

cpu measures processor time used by the process, which excludes time
spent waiting, wall measures elapsed real time.";

pub static COOLDOWN_HELP: &str = "Milliseconds to sleep before every trial

The pause emulates a cold start between trials, set to 0 to run
trials back to back.";
