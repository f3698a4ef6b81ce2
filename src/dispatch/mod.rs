// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod reqwest_dispatcher;
pub mod traits;

pub use reqwest_dispatcher::ReqwestDispatcher;
pub use traits::{DispatchError, RequestDispatcher};
