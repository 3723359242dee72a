mod helpers;
mod test_openroute_provider;
