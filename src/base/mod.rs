// Copyright (c) 2023 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! A synchronous implementation over `std::io`'s [`Read`](std::io::Read), [`Write`](std::io::Write), and
//! [`Seek`](std::io::Seek) traits.

pub mod read;
pub mod write;
