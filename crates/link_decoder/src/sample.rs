//! The `video_hd_540p_lowest` link captured from a RapidAPI TikTok download response.

/// Obfuscated CDN link token, split across lines for readability.
pub const SAMPLE_TOKEN: &str = concat!(
    "aHR0cHMlM0ElMkYlMkZ2MTYtd2ViYXBwLXByaW1lLnRpa3Rvay5jb20lMkZ2aWRlbyUyRnRvcyUyRm5vMWElMkZ0",
    "b3Mtbm8xYS12ZS0wMDY4LW5vJTJGbzBnRVF1Z2RtRk5nQUJrM1BuemlSUWdGcUVRd2ZGS0RJMEZrZXMlMkYlM0Zh",
    "JTNEMTk4OCUyNmJ0aSUzRE9Ec3pOV1l1TURFNiUyNmNoJTNEMCUyNmNyJTNEMyUyNmRyJTNEMCUyNmxyJTNEYWxs",
    "JTI2Y2QlM0QwJTI1N0MwJTI1N0MwJTI1N0MlMjZjdiUzRDElMjZiciUzRDcxMCUyNmJ0JTNEMzU1JTI2Y3MlM0Qw",
    "JTI2ZHMlM0Q2JTI2ZnQlM0QtQ3NrX214VFBEMTJObDljbGgtVXhGdjVTWTNXM3d2MjVpY0FwJTI2bWltZV90eXBl",
    "JTNEdmlkZW9fbXA0JTI2cXMlT0ZFUHFpOFMyUWF1aS1OYVVRdUEM0Q1JTI2cmMlM0RaelUwT0RzOFBEaHBaenc4U",
    "ERacFprQnBNemg0YkhNNWNqc3plRE16Ynpjek5VQXRMbUEwTUdBMVgyTXhYbUJlTFRBMVlTTTFZUzF0TW1ScmFYR",
    "mdMUzFrTVRGemN3JTI1M0QlMjUzRCUyNmJ0YWclM0RlMDAwOTAwMDAlMjZleHBpcmUlM0QxNzQ3NDg2NjY0JTI2b",
    "CUzRDIwMjUwNTE1MjA1NjM3NzVCODVDNUQ3MjU2MzUwRkYzRjklMjZwbHlfdHlwZSUzRDIlMjZwb2xpY3klM0QyJ",
    "TI2c2lnbmF0dXJlJTNEMDI0ZTA1ZDFiYjAxMzkyYjIwMjkxNTBlOWZhYWVjNjMlMjZ0ayUzRHR0X2NoYWluX3Rva",
    "2Vu",
);

/// Public TikTok page for the same video.
pub const SAMPLE_PUBLIC_URL: &str = "https://www.tiktok.com/@aronsogi/video/7474298674303028502";
