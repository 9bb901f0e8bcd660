mod manifest_tests;
