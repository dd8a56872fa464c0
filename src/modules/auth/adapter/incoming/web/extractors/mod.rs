mod admin_session;
