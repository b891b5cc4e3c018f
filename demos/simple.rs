// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use splitlog::Level;

fn main() {
    splitlog::builder()
        .thresholds(Level::Warn, Level::Error, Level::Verbose)
        .apply();
    splitlog::bridge::setup_log_crate();

    splitlog::critf!("replica {} is unreachable", 2);
    splitlog::errorln(&[&"failed to open", &"config.toml"]);
    splitlog::warnf!("dropped: within diff but less severe than err");
    splitlog::noticef!("listening on {}", "0.0.0.0:8080");
    splitlog::info(&[&"workers=", &4]);
    splitlog::info(&[&1, &2, &"x", &3]);
    splitlog::verboseln(&[&"cache", &"warm"]);
    splitlog::debugf!("dropped: less severe than out");

    log::info!("records from the log crate are routed too");

    splitlog::set_out_level(Level::Debug);
    splitlog::debugf!("visible after raising the out threshold");

    splitlog::flush();
}
