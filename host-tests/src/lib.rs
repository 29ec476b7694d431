//! Host-based scenario tests for the Nextion updater
//! These drive the full supervisory loop on the development machine against
//! scripted connections, a simulated panel and a simulated-clock watchdog.
