// Copyright (c) 2026 OverTheFlow and Contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file, You can obtain one at
// https://mozilla.org/MPL/2.0/.

mod run;

pub mod utils {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::io;

    use macswap_common::command::{CommandOutput, CommandRunner, Invocation};

    /// A [`CommandRunner`] that never spawns anything.
    ///
    /// Replies are consumed in order; once the script runs dry every further
    /// command "succeeds" with empty output. Every invocation is recorded.
    #[derive(Default)]
    pub struct ScriptedRunner {
        script: RefCell<VecDeque<io::Result<CommandOutput>>>,
        history: RefCell<Vec<Invocation>>,
    }

    impl ScriptedRunner {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn then_ok(self, stdout: &str) -> Self {
            self.script.borrow_mut().push_back(Ok(CommandOutput::ok(stdout)));
            self
        }

        pub fn then_fail(self, code: i32, stderr: &str) -> Self {
            self.script
                .borrow_mut()
                .push_back(Ok(CommandOutput::failed(code, stderr)));
            self
        }

        pub fn then_spawn_error(self, kind: io::ErrorKind, msg: &str) -> Self {
            self.script
                .borrow_mut()
                .push_back(Err(io::Error::new(kind, msg.to_string())));
            self
        }

        /// Every command line seen so far, rendered as text.
        pub fn history(&self) -> Vec<String> {
            self.history.borrow().iter().map(ToString::to_string).collect()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
            self.history.borrow_mut().push(invocation.clone());
            self.script
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Ok(CommandOutput::ok("")))
        }
    }

    pub fn linux_ifconfig(iface: &str, mac: &str) -> String {
        format!(
            "{iface}: flags=4163<UP,BROADCAST,RUNNING,MULTICAST>  mtu 1500\n        \
             inet 192.168.1.23  netmask 255.255.255.0  broadcast 192.168.1.255\n        \
             ether {mac}  txqueuelen 1000  (Ethernet)\n"
        )
    }

    pub fn macos_ifconfig(iface: &str, mac: &str) -> String {
        format!(
            "{iface}: flags=8863<UP,BROADCAST,SMART,RUNNING,SIMPLEX,MULTICAST> mtu 1500\n\
             \tether {mac}\n\
             \tinet 10.0.0.12 netmask 0xffffff00 broadcast 10.0.0.255\n\
             \tstatus: active\n"
        )
    }
}
